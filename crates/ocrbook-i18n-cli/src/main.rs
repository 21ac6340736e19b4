//! Thin entrypoint delegating to [`ocrbook_i18n_cli::run`].

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = ocrbook_i18n_cli::run().await;
    std::process::exit(exit_code);
}
