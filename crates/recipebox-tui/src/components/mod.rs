pub mod recipe_form;
pub mod recipe_list;
