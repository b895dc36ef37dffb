mod assets;
pub use assets::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod quartz_assets;
        pub use quartz_assets::*;
    }
);
