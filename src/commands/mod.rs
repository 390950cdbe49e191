pub mod restructure;
