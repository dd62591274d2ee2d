use colored::Colorize;

pub fn display_success(message: &str) {
    println!("{}", message.green());
}

pub fn display_info(message: &str) {
    println!("{}", message);
}
