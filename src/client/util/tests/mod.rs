mod format_date;
mod format_relative_time;
mod remove_by_key;
mod replace_by_key;
mod set_applicant_status;
