//! Built-in menu data

use shared::models::MenuItem;

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/250";

fn item(id: &str, name: &str, description: &str, price: f64, category: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        is_popular: false,
        is_new: false,
    }
}

fn popular(item: MenuItem) -> MenuItem {
    MenuItem {
        is_popular: true,
        ..item
    }
}

fn new_arrival(item: MenuItem) -> MenuItem {
    MenuItem {
        is_new: true,
        ..item
    }
}

/// The storefront menu, as printed on the physical board
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        // Burgers
        popular(item(
            "1",
            "Crispy Chicken Burger",
            "Crispy fried chicken breast with fresh lettuce, tomato, and special sauce",
            180.0,
            "Burgers",
        )),
        item(
            "2",
            "Spicy Paneer Burger",
            "Spiced paneer patty with fresh vegetables and mint chutney",
            180.0,
            "Burgers",
        ),
        item(
            "3",
            "Fish Burger",
            "Crispy fish fillet with tartar sauce and fresh lettuce",
            200.0,
            "Burgers",
        ),
        item(
            "4",
            "Shrimp Burger",
            "Golden fried shrimp with special mayo and crisp lettuce",
            200.0,
            "Burgers",
        ),
        popular(item(
            "5",
            "Classic Burger",
            "Juicy beef patty with cheese, lettuce, tomato, and special sauce",
            180.0,
            "Burgers",
        )),
        item(
            "6",
            "Double Decker Classic",
            "Two beef patties with double cheese and signature sauce",
            280.0,
            "Burgers",
        ),
        item(
            "7",
            "Mutton Burger",
            "Tender mutton patty with fresh herbs and spicy sauce",
            200.0,
            "Burgers",
        ),
        // Fried Chicken
        popular(item(
            "8",
            "Broasted Fried Chicken - 2 Piece",
            "Crispy golden fried chicken pieces with special seasoning",
            180.0,
            "Fried Chicken",
        )),
        item(
            "9",
            "Broasted Fried Chicken - 4 Piece",
            "Four pieces of our signature crispy fried chicken",
            360.0,
            "Fried Chicken",
        ),
        item(
            "10",
            "Broasted Fried Chicken - 8 Piece",
            "Perfect for sharing - eight pieces of crispy goodness",
            600.0,
            "Fried Chicken",
        ),
        item(
            "11",
            "Buffalo Wings",
            "Spicy buffalo wings tossed in tangy sauce (5 pieces)",
            250.0,
            "Fried Chicken",
        ),
        item(
            "12",
            "Chicken Tenders",
            "Crispy chicken strips perfect for dipping (4 pieces)",
            250.0,
            "Fried Chicken",
        ),
        // Finger Foods
        new_arrival(item(
            "13",
            "Imitation Crab Claw Amritsari",
            "Golden fried crab claw imitation with special spices (6 pieces)",
            200.0,
            "Finger Foods",
        )),
        new_arrival(item(
            "14",
            "Imitation Lobster Bites",
            "Crispy lobster-style bites with herbs (8 pieces)",
            200.0,
            "Finger Foods",
        )),
        item(
            "15",
            "Jalapeno Poppers",
            "Cheese-stuffed jalapenos in crispy coating (6 pieces)",
            180.0,
            "Finger Foods",
        ),
        item(
            "16",
            "Cheese Fingers",
            "Mozzarella sticks with marinara sauce (6 pieces)",
            180.0,
            "Finger Foods",
        ),
        item(
            "17",
            "Dynamite Shrimps",
            "Spicy fried shrimps with special sauce (7 pieces)",
            220.0,
            "Finger Foods",
        ),
        // Fitness Food
        item(
            "18",
            "Light Mutton Lettuce Wrap",
            "Grilled mutton patty wrapped in fresh lettuce leaves",
            240.0,
            "Fitness Food",
        ),
        item(
            "19",
            "Light Chicken Steak Wrap",
            "Grilled chicken breast in lettuce wrap with herbs",
            200.0,
            "Fitness Food",
        ),
        item(
            "20",
            "Gym Box",
            "High protein meal with steak, lettuce, tomato, and special sauce",
            250.0,
            "Fitness Food",
        ),
        item(
            "21",
            "Steak Salad",
            "Fresh mixed greens with grilled steak and veggies (62g protein)",
            240.0,
            "Fitness Food",
        ),
    ]
}
