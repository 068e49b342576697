//! Capacity units a policy occupies while it is being implemented.

use crate::model::{Category, Complexity, PolicyTemplate};

fn complexity_weight(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Low => 15.0,
        Complexity::Medium => 25.0,
        Complexity::High => 40.0,
    }
}

fn category_multiplier(category: Category) -> f64 {
    match category {
        Category::Economic => 1.2,
        Category::Social => 1.0,
        Category::Environmental => 1.1,
        Category::Foreign => 1.3,
    }
}

pub fn load(template: &PolicyTemplate) -> u32 {
    (complexity_weight(template.complexity) * category_multiplier(template.category)).round() as u32
}
