use colored::Colorize;

pub fn info(message: &str) {
    println!("{} {}", "[INFO]".green().bold(), message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}
