// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Directive collection.
//!
//! A __directive__ is one configuration statement destined for the generated
//! lombok.config file. Directives are collected from a fixed table of named
//! __option slots__. Each slot knows the lombok configuration key it feeds,
//! and whether it takes a single value or a list of values to append.
//!
//! # Slot Kinds
//!
//! - [`DirectiveKind::SingleValue`] slots produce one `key = value` line.
//! - [`DirectiveKind::ListAppend`] slots split their value on commas and
//!   produce one `key += token` line for each token.
//!
//! # Skip And Continue
//!
//! Collection never fails. A slot whose value is absent, empty, or made up
//! only of whitespace and commas produces nothing. A slot whose value cannot
//! be read from its [`OptionSource`] is logged and skipped, so one bad value
//! never prevents the remaining slots from being collected.

use tracing::{debug, warn};

/// Kind of configuration statement a slot produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Plain `key = value` assignment.
    #[default]
    SingleValue,

    /// One `key += token` line per comma separated token.
    ListAppend,
}

/// One configuration statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Lombok configuration key.
    pub key: String,

    /// Assignment or append.
    pub kind: DirectiveKind,

    /// Value to write. For list directives this is a single token.
    pub value: String,
}

impl Directive {
    /// Construct new directive.
    pub fn new(key: impl Into<String>, kind: DirectiveKind, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            value: value.into(),
        }
    }
}

/// Named option slot.
///
/// Slots are declared statically in [`SLOTS`]. The declaration order of the
/// table is the order directives appear in the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Option name used in settings files and on the command line.
    pub name: &'static str,

    /// Lombok configuration key written to the generated file.
    pub key: &'static str,

    /// Kind of directive produced.
    pub kind: DirectiveKind,
}

impl Slot {
    const fn single(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            kind: DirectiveKind::SingleValue,
        }
    }

    const fn list(name: &'static str, key: &'static str) -> Self {
        Self {
            name,
            key,
            kind: DirectiveKind::ListAppend,
        }
    }
}

/// Find slot by option name.
pub fn find_slot(name: &str) -> Option<&'static Slot> {
    SLOTS.iter().find(|slot| slot.name == name)
}

/// Every option slot understood by lombokgen, in output order.
///
/// Covers the configuration keys lombok itself understands, grouped by
/// feature. Each `*_flag_usage` slot accepts `WARNING`, `ERROR`, or `ALLOW`.
pub static SLOTS: &[Slot] = &[
    // Global.
    Slot::single("add_generated_annotation", "lombok.addGeneratedAnnotation"),
    Slot::single("add_javax_generated_annotation", "lombok.addJavaxGeneratedAnnotation"),
    Slot::single("add_jakarta_generated_annotation", "lombok.addJakartaGeneratedAnnotation"),
    Slot::single("add_lombok_generated_annotation", "lombok.addLombokGeneratedAnnotation"),
    Slot::single("add_null_annotations", "lombok.addNullAnnotations"),
    Slot::single("add_suppress_warnings", "lombok.addSuppressWarnings"),
    Slot::single("add_suppress_fb_warnings", "lombok.extern.findbugs.addSuppressFBWarnings"),
    Slot::list("copyable_annotations", "lombok.copyableAnnotations"),
    Slot::single("experimental_flag_usage", "lombok.experimental.flagUsage"),
    // Accessors.
    Slot::single("accessors_flag_usage", "lombok.accessors.flagUsage"),
    Slot::single("accessors_capitalization", "lombok.accessors.capitalization"),
    Slot::single("accessors_chain", "lombok.accessors.chain"),
    Slot::single("accessors_fluent", "lombok.accessors.fluent"),
    Slot::single("accessors_make_final", "lombok.accessors.makeFinal"),
    Slot::list("accessors_prefix", "lombok.accessors.prefix"),
    // Constructors.
    Slot::single("any_constructor_add_constructor_properties", "lombok.anyConstructor.addConstructorProperties"),
    Slot::single("any_constructor_suppress_constructor_properties", "lombok.anyConstructor.suppressConstructorProperties"),
    Slot::single("any_constructor_flag_usage", "lombok.anyConstructor.flagUsage"),
    Slot::single("all_args_constructor_flag_usage", "lombok.allArgsConstructor.flagUsage"),
    Slot::single("no_args_constructor_extra_private", "lombok.noArgsConstructor.extraPrivate"),
    Slot::single("no_args_constructor_flag_usage", "lombok.noArgsConstructor.flagUsage"),
    Slot::single("required_args_constructor_flag_usage", "lombok.requiredArgsConstructor.flagUsage"),
    // Builders.
    Slot::single("builder_class_name", "lombok.builder.className"),
    Slot::single("builder_flag_usage", "lombok.builder.flagUsage"),
    Slot::single("singular_auto", "lombok.singular.auto"),
    Slot::single("singular_use_guava", "lombok.singular.useGuava"),
    Slot::single("singular_flag_usage", "lombok.singular.flagUsage"),
    Slot::single("super_builder_flag_usage", "lombok.superBuilder.flagUsage"),
    Slot::single("jacksonized_flag_usage", "lombok.jacksonized.flagUsage"),
    // Data classes.
    Slot::single("data_flag_usage", "lombok.data.flagUsage"),
    Slot::single("value_flag_usage", "lombok.value.flagUsage"),
    Slot::single("equals_and_hash_code_call_super", "lombok.equalsAndHashCode.callSuper"),
    Slot::single("equals_and_hash_code_do_not_use_getters", "lombok.equalsAndHashCode.doNotUseGetters"),
    Slot::single("equals_and_hash_code_flag_usage", "lombok.equalsAndHashCode.flagUsage"),
    Slot::single("to_string_call_super", "lombok.toString.callSuper"),
    Slot::single("to_string_do_not_use_getters", "lombok.toString.doNotUseGetters"),
    Slot::single("to_string_include_field_names", "lombok.toString.includeFieldNames"),
    Slot::single("to_string_only_explicitly_included", "lombok.toString.onlyExplicitlyIncluded"),
    Slot::single("to_string_flag_usage", "lombok.toString.flagUsage"),
    // Fields.
    Slot::single("field_defaults_default_final", "lombok.fieldDefaults.defaultFinal"),
    Slot::single("field_defaults_default_private", "lombok.fieldDefaults.defaultPrivate"),
    Slot::single("field_defaults_flag_usage", "lombok.fieldDefaults.flagUsage"),
    Slot::single("field_name_constants_inner_type_name", "lombok.fieldNameConstants.innerTypeName"),
    Slot::single("field_name_constants_uppercase", "lombok.fieldNameConstants.uppercase"),
    Slot::single("field_name_constants_flag_usage", "lombok.fieldNameConstants.flagUsage"),
    Slot::single("getter_flag_usage", "lombok.getter.flagUsage"),
    Slot::single("getter_lazy_flag_usage", "lombok.getter.lazy.flagUsage"),
    Slot::single("getter_no_is_prefix", "lombok.getter.noIsPrefix"),
    Slot::single("setter_flag_usage", "lombok.setter.flagUsage"),
    Slot::single("with_flag_usage", "lombok.with.flagUsage"),
    Slot::single("with_by_flag_usage", "lombok.withBy.flagUsage"),
    Slot::single("wither_flag_usage", "lombok.wither.flagUsage"),
    // Logging.
    Slot::single("log_field_name", "lombok.log.fieldName"),
    Slot::single("log_field_is_static", "lombok.log.fieldIsStatic"),
    Slot::single("log_custom_declaration", "lombok.log.custom.declaration"),
    Slot::single("log_flag_usage", "lombok.log.flagUsage"),
    Slot::single("log_apache_commons_flag_usage", "lombok.log.apacheCommons.flagUsage"),
    Slot::single("log_custom_flag_usage", "lombok.log.custom.flagUsage"),
    Slot::single("log_flogger_flag_usage", "lombok.log.flogger.flagUsage"),
    Slot::single("log_java_util_logging_flag_usage", "lombok.log.javaUtilLogging.flagUsage"),
    Slot::single("log_jbosslog_flag_usage", "lombok.log.jbosslog.flagUsage"),
    Slot::single("log_log4j_flag_usage", "lombok.log.log4j.flagUsage"),
    Slot::single("log_log4j2_flag_usage", "lombok.log.log4j2.flagUsage"),
    Slot::single("log_slf4j_flag_usage", "lombok.log.slf4j.flagUsage"),
    Slot::single("log_xslf4j_flag_usage", "lombok.log.xslf4j.flagUsage"),
    // Null checks.
    Slot::single("non_null_exception_type", "lombok.nonNull.exceptionType"),
    Slot::single("non_null_flag_usage", "lombok.nonNull.flagUsage"),
    // Other features.
    Slot::single("cleanup_flag_usage", "lombok.cleanup.flagUsage"),
    Slot::single("delegate_flag_usage", "lombok.delegate.flagUsage"),
    Slot::single("extension_method_flag_usage", "lombok.extensionMethod.flagUsage"),
    Slot::single("helper_flag_usage", "lombok.helper.flagUsage"),
    Slot::single("locked_flag_usage", "lombok.locked.flagUsage"),
    Slot::single("on_x_flag_usage", "lombok.onX.flagUsage"),
    Slot::single("sneaky_throws_flag_usage", "lombok.sneakyThrows.flagUsage"),
    Slot::single("standard_exception_flag_usage", "lombok.standardException.flagUsage"),
    Slot::single("synchronized_flag_usage", "lombok.synchronized.flagUsage"),
    Slot::single("utility_class_flag_usage", "lombok.utilityClass.flagUsage"),
    Slot::single("val_flag_usage", "lombok.val.flagUsage"),
    Slot::single("var_flag_usage", "lombok.var.flagUsage"),
];

/// Provider of raw option slot values.
///
/// The schema of slot names is fixed by [`SLOTS`]. Implementors only need to
/// answer what the current value of a named slot is.
pub trait OptionSource {
    /// Get current raw value of named slot.
    ///
    /// # Errors
    ///
    /// - Return [`SlotAccessError`] if the stored value cannot be read as
    ///   text.
    fn slot_value(&self, name: &str) -> Result<Option<String>>;
}

/// Collect directives from all declared slots.
pub fn collect_directives(source: &impl OptionSource) -> Vec<Directive> {
    collect_directives_from(SLOTS, source)
}

/// Collect directives from a given slot table.
///
/// Slots are visited in table order. Slots that cannot be read are skipped.
pub fn collect_directives_from(slots: &[Slot], source: &impl OptionSource) -> Vec<Directive> {
    let mut directives = Vec::new();
    for slot in slots {
        let value = match source.slot_value(slot.name) {
            Ok(Some(value)) => value,
            Ok(None) => continue,
            Err(error) => {
                warn!("skipping option {:?}: {error}", slot.name);
                continue;
            }
        };

        if is_effectively_empty(&value) {
            continue;
        }

        match slot.kind {
            DirectiveKind::SingleValue => {
                directives.push(Directive::new(
                    slot.key,
                    slot.kind,
                    value.trim_matches(is_blank),
                ));
            }
            DirectiveKind::ListAppend => {
                directives.extend(
                    split_list(&value).map(|token| Directive::new(slot.key, slot.kind, token)),
                );
            }
        }
    }

    debug!("collected {} directives", directives.len());
    directives
}

/// Check if value is made up only of whitespace and commas.
///
/// Only ASCII whitespace counts, so a lone no-break space is a real value.
pub fn is_effectively_empty(value: &str) -> bool {
    value.chars().all(|c| is_blank(c) || c == ',')
}

// INVARIANT: Blank means ASCII whitespace, vertical tab included.
fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

// INVARIANT: Empty interior tokens like the middle of "a,,b" are dropped.
fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(|token| token.trim_matches(is_blank))
        .filter(|token| !token.is_empty())
}

/// Slot value could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlotAccessError {
    /// Value has a type that has no textual form.
    #[error("unsupported value type {kind}")]
    Unsupported { kind: &'static str },

    /// List value holds an entry that has no textual form.
    #[error("unsupported list entry type {kind} at index {index}")]
    UnsupportedEntry { kind: &'static str, index: usize },
}

/// Friendly result alias :3
pub type Result<T, E = SlotAccessError> = std::result::Result<T, E>;
