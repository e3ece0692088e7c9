mod album_items;

pub use album_items::AlbumItemsManager;
