mod toolbar;
mod pagination;
mod status_line;
mod game_grid;

pub use toolbar::Toolbar;
pub use pagination::Pagination;
pub use status_line::StatusLine;
pub use game_grid::GameGrid;
