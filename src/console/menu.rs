pub const MAIN_MENU: &str = "\nMenu:\n\
1. List products\n\
2. Search products\n\
3. Place an order\n\
4. Purchase history\n\
5. Exit";

pub const SEARCH_MENU: &str = "\n1. Search by category\n\
2. Search by price (up to)\n\
3. Search by rating (from)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListProducts,
    Search,
    PlaceOrder,
    History,
    Exit,
}

impl MenuChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::ListProducts),
            2 => Some(MenuChoice::Search),
            3 => Some(MenuChoice::PlaceOrder),
            4 => Some(MenuChoice::History),
            5 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchChoice {
    Category,
    MaxPrice,
    MinRating,
}

impl SearchChoice {
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(SearchChoice::Category),
            2 => Some(SearchChoice::MaxPrice),
            3 => Some(SearchChoice::MinRating),
            _ => None,
        }
    }
}
