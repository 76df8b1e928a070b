//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

mod app;
mod demo;
mod panels;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run()
}
