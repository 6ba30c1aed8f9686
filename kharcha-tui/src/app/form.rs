use kharcha_client::{Category, NewExpense};

use super::TextInput;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Category,
    SubCategory,
    Amount,
}

/// State of the add-expense form. Category and subcategory are pickers over
/// the fixed taxonomy; amount is free text validated on submit.
#[derive(Debug, Clone)]
pub struct ExpenseForm {
    pub category: Option<Category>,
    pub sub_category: Option<&'static str>,
    pub amount: TextInput,
    pub focused_field: FormField,
}

impl ExpenseForm {
    pub fn new() -> Self {
        Self {
            category: None,
            sub_category: None,
            amount: TextInput::default(),
            focused_field: FormField::Category,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Category => FormField::SubCategory,
            FormField::SubCategory => FormField::Amount,
            FormField::Amount => FormField::Category,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused_field = match self.focused_field {
            FormField::Category => FormField::Amount,
            FormField::SubCategory => FormField::Category,
            FormField::Amount => FormField::SubCategory,
        };
    }

    /// Cycle the focused picker forward, or ignore for the amount field.
    pub fn select_next(&mut self) {
        match self.focused_field {
            FormField::Category => self.cycle_category(1),
            FormField::SubCategory => self.cycle_sub_category(1),
            FormField::Amount => {}
        }
    }

    pub fn select_prev(&mut self) {
        match self.focused_field {
            FormField::Category => self.cycle_category(-1),
            FormField::SubCategory => self.cycle_sub_category(-1),
            FormField::Amount => {}
        }
    }

    /// Changing the category resets the subcategory, since the valid set
    /// depends on the category.
    fn cycle_category(&mut self, step: isize) {
        let all = &Category::ALL;
        let next = match self.category {
            None => {
                if step >= 0 {
                    0
                } else {
                    all.len() - 1
                }
            }
            Some(current) => {
                let idx = all.iter().position(|c| *c == current).unwrap_or(0) as isize;
                (idx + step).rem_euclid(all.len() as isize) as usize
            }
        };
        if self.category != Some(all[next]) {
            self.category = Some(all[next]);
            self.sub_category = None;
        }
    }

    fn cycle_sub_category(&mut self, step: isize) {
        let Some(category) = self.category else {
            return;
        };
        let subs = category.subcategories();
        let next = match self.sub_category {
            None => {
                if step >= 0 {
                    0
                } else {
                    subs.len() - 1
                }
            }
            Some(current) => {
                let idx = subs.iter().position(|s| *s == current).unwrap_or(0) as isize;
                (idx + step).rem_euclid(subs.len() as isize) as usize
            }
        };
        self.sub_category = Some(subs[next]);
    }

    pub fn amount_input_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.amount.insert(c);
        }
    }

    pub fn amount_backspace(&mut self) {
        self.amount.backspace();
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Local pre-submission checks, in the same order the original form runs
    /// them. An error here means no network call is made.
    pub fn validate(&self) -> Result<NewExpense, String> {
        let Some(category) = self.category else {
            return Err("Please select a category.".to_string());
        };
        let sub_category = match self.sub_category {
            Some(s) if !s.is_empty() => s,
            _ => return Err("Please select a subcategory.".to_string()),
        };
        let amount = match self.amount.value.trim().parse::<f64>() {
            Ok(amount) if amount > 0.0 => amount,
            _ => return Err("Please enter a valid amount.".to_string()),
        };
        Ok(NewExpense {
            category,
            sub_category: sub_category.to_string(),
            amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(category: Option<Category>, sub: Option<&'static str>, amount: &str) -> ExpenseForm {
        let mut f = ExpenseForm::new();
        f.category = category;
        f.sub_category = sub;
        f.amount.value = amount.to_string();
        f
    }

    #[test]
    fn missing_category_short_circuits() {
        let err = form(None, None, "150").validate().unwrap_err();
        assert_eq!(err, "Please select a category.");
    }

    #[test]
    fn missing_subcategory_short_circuits() {
        let err = form(Some(Category::Fuel), None, "150").validate().unwrap_err();
        assert_eq!(err, "Please select a subcategory.");
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let err = form(Some(Category::Food), Some("Lunch"), "-5")
            .validate()
            .unwrap_err();
        assert_eq!(err, "Please enter a valid amount.");

        let err = form(Some(Category::Food), Some("Lunch"), "0")
            .validate()
            .unwrap_err();
        assert_eq!(err, "Please enter a valid amount.");

        let err = form(Some(Category::Food), Some("Lunch"), "")
            .validate()
            .unwrap_err();
        assert_eq!(err, "Please enter a valid amount.");
    }

    #[test]
    fn a_complete_form_validates() {
        let expense = form(Some(Category::Food), Some("Lunch"), "150")
            .validate()
            .unwrap();
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.sub_category, "Lunch");
        assert_eq!(expense.amount, 150.0);
    }

    #[test]
    fn changing_category_resets_subcategory() {
        let mut f = form(Some(Category::Food), Some("Lunch"), "150");
        f.focused_field = FormField::Category;
        f.select_next();
        assert_eq!(f.category, Some(Category::Entertainment));
        assert_eq!(f.sub_category, None);
    }

    #[test]
    fn subcategory_cycles_within_the_selected_category() {
        let mut f = form(Some(Category::Fuel), None, "");
        f.focused_field = FormField::SubCategory;
        f.select_next();
        assert_eq!(f.sub_category, Some("Petrol"));
        f.select_prev();
        f.select_prev();
        assert_eq!(f.sub_category, Some("CNG"));
    }

    #[test]
    fn amount_input_accepts_digits_only() {
        let mut f = ExpenseForm::new();
        for c in "1a5x0.".chars() {
            f.amount_input_char(c);
        }
        assert_eq!(f.amount.value, "150.");
    }
}
