fn main() {
    masthead::cli::run();
}
