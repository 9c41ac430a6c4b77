fn main() {
    lifestore_frontend::run_app();
}
