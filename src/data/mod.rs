mod builtin;
mod loader;

pub(crate) use loader::load_store;
