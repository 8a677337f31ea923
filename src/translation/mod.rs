use std::path::Path;

use tarjama::Translator;

/// Loads the `pt` toast catalogue shipped under `translations/`.
pub fn initialize_translator() -> Translator {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("translations");

    let catalogue = tarjama::loader::toml::load_sync(dir).expect("couldn't load the toast catalogue");

    Translator::with_catalogue_bag(catalogue)
}
