//! Chart palette and category color tables.

/// Category name to hex color.
pub type ColorTable = &'static [(&'static str, &'static str)];

pub const CHART_PALETTE: [&str; 10] = [
    "#6366f1", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#3b82f6", "#ef4444", "#14b8a6",
    "#f97316", "#a855f7",
];

pub const PRIMARY: &str = "#6366f1";
pub const SECONDARY: &str = "#8b5cf6";
pub const SUCCESS: &str = "#10b981";
pub const WARNING: &str = "#f59e0b";
pub const DANGER: &str = "#ef4444";
pub const INFO: &str = "#3b82f6";
pub const GRAY: &str = "#64748b";

pub const CHANNEL_COLORS: ColorTable = &[
    ("Paid Social", "#6366f1"),
    ("Paid Search", "#3b82f6"),
    ("Organic Search", "#10b981"),
    ("Organic Social", "#14b8a6"),
    ("Direct", "#8b5cf6"),
    ("Email", "#f59e0b"),
    ("Referral", "#ec4899"),
    ("Affiliates", "#f97316"),
    ("Display", "#a855f7"),
    ("Other", "#64748b"),
];

pub const RFM_SEGMENT_COLORS: ColorTable = &[
    ("Champions", "#10b981"),
    ("Loyal Customers", "#3b82f6"),
    ("Recent Customers", "#8b5cf6"),
    ("Potential Loyalists", "#6366f1"),
    ("At Risk", "#f59e0b"),
    ("Hibernating", "#f97316"),
    ("Lost", "#ef4444"),
    ("Other", "#64748b"),
];

pub const PLATFORM_COLORS: ColorTable = &[
    ("meta", "#1877f2"),
    ("google", "#ea4335"),
    ("tiktok", "#000000"),
    ("facebook", "#1877f2"),
    ("instagram", "#e4405f"),
];

pub const ABC_COLORS: ColorTable = &[("A", "#10b981"), ("B", "#f59e0b"), ("C", "#ef4444")];

pub const FUNNEL_STAGE_COLORS: ColorTable =
    &[("TOFU", "#6366f1"), ("MOFU", "#8b5cf6"), ("BOFU", "#10b981")];

pub const PRIORITY_COLORS: ColorTable =
    &[("high", "#ef4444"), ("medium", "#f59e0b"), ("low", "#10b981")];

/// Table color for `category`, or the palette color at `index` (cycling)
/// for categories the table does not know.
pub fn color_for(category: &str, index: usize, table: ColorTable) -> &'static str {
    table
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(CHART_PALETTE[index % CHART_PALETTE.len()])
}

pub fn palette(index: usize) -> &'static str {
    CHART_PALETTE[index % CHART_PALETTE.len()]
}

/// `#rrggbb` plus a two-digit alpha, for tinted backgrounds.
pub fn with_alpha(color: &str, alpha_hex: &str) -> String {
    format!("{}{}", color, alpha_hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_uses_table() {
        assert_eq!(color_for("Champions", 5, RFM_SEGMENT_COLORS), "#10b981");
        assert_eq!(color_for("google", 0, PLATFORM_COLORS), "#ea4335");
        assert_eq!(color_for("BOFU", 0, FUNNEL_STAGE_COLORS), SUCCESS);
    }

    #[test]
    fn test_unknown_category_cycles_palette() {
        assert_eq!(color_for("Podcast", 0, CHANNEL_COLORS), CHART_PALETTE[0]);
        assert_eq!(color_for("Podcast", 12, CHANNEL_COLORS), CHART_PALETTE[2]);
        assert_eq!(palette(10), palette(0));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(color_for("Google", 1, PLATFORM_COLORS), CHART_PALETTE[1]);
    }
}
