use std::borrow::Cow;

use anyhow::{Result, anyhow};
use smallvec::SmallVec;

/// A source of named static assets (icons, stylesheets).
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Vec<String>;
}

/// Aggregates several asset providers; the first one holding a path wins.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    pub fn load(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        if path.is_empty() {
            return Err(anyhow!("empty asset path"));
        }

        for provider in &self.providers {
            if let Some(asset) = provider.get(path) {
                return Ok(asset);
            }
        }

        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    pub fn list(&self, path: &str) -> Vec<String> {
        self.providers
            .iter()
            .flat_map(|provider| provider.list(path))
            .collect()
    }
}

/// Builds an [`Assets`] aggregator from a list of providers.
#[macro_export]
macro_rules! assets {
    ( $( $provider:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($provider) ),*
        ])
    };
}
