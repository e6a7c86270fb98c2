mod instance;
mod item;
mod selection;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use item::Item;
#[doc(inline)]
pub use selection::Selection;
