use crate::config::Config;
use crate::domain::areas::extensions::Extensions;
use std::cell::{RefCell, RefMut};

/// The `plz` host: the extensions it knows about and where it reports to.
pub struct Host {
    writer: RefCell<Box<dyn std::io::Write>>,
    extensions: Extensions,
}

impl Host {
    pub fn new(config: &Config, writer: Box<dyn std::io::Write>) -> Self {
        let extensions = Extensions::new(config.extensions_dir.clone().into_boxed_path());

        Host {
            writer: RefCell::new(writer),
            extensions,
        }
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }
}
