pub mod update_list;

pub use update_list::add_favorite;
pub use update_list::add_to_watch;
pub use update_list::remove_favorite;
pub use update_list::remove_to_watch;
