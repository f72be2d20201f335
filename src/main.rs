fn main() -> std::process::ExitCode {
    contact_upload_lib::run()
}
