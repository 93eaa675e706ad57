mod add_key;
mod config;
mod untranslated;
