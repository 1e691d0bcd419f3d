use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionVariant {
    Default,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct QuickAction {
    pub label: String,
    pub variant: ActionVariant,
}

pub fn quick_actions() -> Vec<QuickAction> {
    [
        ("Add Purchase", ActionVariant::Default),
        ("Create Shopping List", ActionVariant::Secondary),
        ("Add Inventory Item", ActionVariant::Outline),
        ("View Notifications", ActionVariant::Ghost),
    ]
    .into_iter()
    .map(|(label, variant)| QuickAction {
        label: label.to_string(),
        variant,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{ActionVariant, quick_actions};

    #[test]
    fn quick_actions_keep_display_order() {
        let actions = quick_actions();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0].label, "Add Purchase");
        assert_eq!(actions[0].variant, ActionVariant::Default);
        assert_eq!(actions[3].variant, ActionVariant::Ghost);
    }
}
