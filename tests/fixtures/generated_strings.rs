// @generated by glossarist-codegen. Do not edit.
//
// Forces every string resource declared in a file marked with
// `generate_strings!()`, in discovery order.

#[allow(dead_code)]
pub mod generated_strings {
    /// Registers every discovered resource with the global `Strings` facade.
    pub fn register_all() -> ::core::result::Result<(), ::glossarist::I18nError> {
        // strings.rs
        crate::strings::GREETING.force()?;
        crate::strings::APP_STRINGS.force()?;
        Ok(())
    }

    /// Registers every discovered resource into an owned manager.
    pub fn register_all_into(manager: &mut ::glossarist::LocaleManager) -> ::core::result::Result<(), ::glossarist::I18nError> {
        // strings.rs
        crate::strings::GREETING.register_into(manager)?;
        crate::strings::APP_STRINGS.register_into(manager)?;
        Ok(())
    }
}
