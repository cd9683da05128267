/// Extraction mode, selected once at startup by the `all_dialog_record`
/// configuration flag and passed to every extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Forward the most recent user text plus the most recent
    /// assistant/system text.
    AllDialog,
    /// Forward the most recent user text only.
    LastUserOnly,
}

impl Default for ExtractMode {
    fn default() -> Self {
        Self::LastUserOnly
    }
}

impl ExtractMode {
    /// `1` selects all-dialog; any other value falls back to last-user-only.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            ExtractMode::AllDialog
        } else {
            ExtractMode::LastUserOnly
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExtractMode;

    #[test]
    fn flag_one_selects_all_dialog() {
        assert_eq!(ExtractMode::from_flag(1), ExtractMode::AllDialog);
    }

    #[test]
    fn any_other_flag_selects_last_user_only() {
        assert_eq!(ExtractMode::from_flag(0), ExtractMode::LastUserOnly);
        assert_eq!(ExtractMode::from_flag(2), ExtractMode::LastUserOnly);
        assert_eq!(ExtractMode::from_flag(-1), ExtractMode::LastUserOnly);
    }

    #[test]
    fn default_is_last_user_only() {
        assert_eq!(ExtractMode::default(), ExtractMode::LastUserOnly);
    }
}
