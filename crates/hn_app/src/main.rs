mod platform;

fn main() -> eframe::Result<()> {
    platform::run_app()
}
