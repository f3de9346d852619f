mod app;
mod browser_url;

fn main() {
    dioxus::launch(app::App);
}
