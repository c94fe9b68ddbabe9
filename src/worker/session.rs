use crate::domain::{account::Account, catalog::Catalog};

/// Everything one run operates on. Built once at startup and handed to the
/// processor explicitly.
#[derive(Debug)]
pub struct Session {
    pub catalog: Catalog,
    pub account: Account,
}

impl Session {
    pub fn new(catalog: Catalog, account: Account) -> Self {
        Self { catalog, account }
    }
}
