mod application_summary;
mod format_salary;
mod search_jobs;
mod sorted_jobs;
mod timeline_stage_index;
