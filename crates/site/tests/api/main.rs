mod helpers;
mod schedule_source;
mod ui_fragments;
