//! Text templates for the run summary

pub const SUMMARY: &str = "summary";
pub const DETAILS: &str = "details";

pub const SUMMARY_TEMPLATE: &str = r#"Summary of commands results
========================
{% for result in results -%}
{% if result.status == "success" %}✅{% else %}❌{% endif %} {{ command_prefix }} {{ result.name }}
{% endfor -%}
"#;

pub const DETAILS_TEMPLATE: &str = r#"Detailed Errors for failed commands
=================================
{% for failure in failures -%}
❌ {{ command_prefix }} {{ failure.name }}

Error: {{ failure.error }}
{% endfor -%}
=================================
"#;
