pub mod a001_sales_record;
