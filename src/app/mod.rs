mod page;
mod root;
mod store;

pub use {page::Page, root::App, store::AppStore};
