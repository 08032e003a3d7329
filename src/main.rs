mod icon_generator;
mod icon_spec;

use std::error::Error;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    let asset_dir = Path::new(icon_spec::ASSET_DIR);
    match icon_generator::generate_icons(asset_dir) {
        Ok(icons) => {
            for icon in &icons {
                log::debug!("{} ({}px, {})", icon.path.display(), icon.size, icon.description);
            }
            log::info!("Generated {} dark icons in {}", icons.len(), asset_dir.display());
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("   caused by: {}", cause);
                source = cause.source();
            }
            process::exit(1);
        }
    }
}
