pub fn init_logging() {
    env_logger::init()
}
