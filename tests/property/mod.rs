mod collect_order;
mod determinism;
