pub mod page_naming;

pub use page_naming::{PART_EXTENSION, current_page, is_part_file, output_name_for_part};
