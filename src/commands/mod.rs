mod check;
mod context;
mod list_rules;

pub use check::{
    build_run_options, determine_exit_code, format_output, run_check, run_check_impl,
    run_check_with_context,
};
pub use context::{color_choice_to_mode, load_config, report_error, write_output};
pub use list_rules::{format_rule_list, run_list_rules};
