#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    prompt_studio::config::load_dotenv();
    tracing::info!("starting Visual Prompt Studio");
    dioxus::launch(prompt_studio::ui::App);
}

#[cfg(not(any(feature = "desktop", feature = "web", feature = "mobile")))]
fn main() {
    tracing_subscriber::fmt().with_target(false).init();
    tracing::error!("built without a UI platform; enable the desktop, web or mobile feature");
    std::process::exit(1);
}
