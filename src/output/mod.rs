mod csv;
mod detail;
mod format;
mod html;
mod json;
mod layout;
mod now;
mod table;

pub(crate) use csv::{output_categories_csv, output_timeline_csv};
pub(crate) use detail::print_entry_detail;
pub(crate) use format::Labels;
pub(crate) use html::{PageOptions, render_page};
pub(crate) use json::{
    output_categories_json, output_entry_json, output_layout_json, output_timeline_json,
};
pub(crate) use layout::print_layout_table;
pub(crate) use now::{output_now_json, print_now};
pub(crate) use table::{TimelineTableOptions, print_categories_table, print_timeline_table};
