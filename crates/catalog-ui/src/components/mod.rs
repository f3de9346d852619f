pub mod game_card;
pub mod game_list;
pub mod pagination_bar;
