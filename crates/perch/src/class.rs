use perch_core::{Position, TooltipVariant};

/// Maps `(variant, resolved position)` to the overlay's presentation class.
pub trait ClassResolver {
    fn class_for(&self, variant: TooltipVariant, position: Position) -> String;
}

/// Style-module key convention: `tooltip<Variant>_<Position>`, e.g. `tooltipDefault_Top`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleClassResolver;

impl ClassResolver for ModuleClassResolver {
    fn class_for(&self, variant: TooltipVariant, position: Position) -> String {
        format!("tooltip{variant}_{position}")
    }
}

impl<F> ClassResolver for F
where
    F: Fn(TooltipVariant, Position) -> String,
{
    fn class_for(&self, variant: TooltipVariant, position: Position) -> String {
        self(variant, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_keys_combine_variant_and_position() {
        let r = ModuleClassResolver;
        assert_eq!(r.class_for(TooltipVariant::Default, Position::Top), "tooltipDefault_Top");
        assert_eq!(
            r.class_for(TooltipVariant::Popup, Position::LeftBottom),
            "tooltipPopup_LeftBottom"
        );
    }

    #[test]
    fn closures_can_resolve_classes() {
        let r = |_: TooltipVariant, p: Position| format!("tip tip--{}", p.as_str().to_lowercase());
        assert_eq!(r.class_for(TooltipVariant::Default, Position::RightTop), "tip tip--righttop");
    }
}
