mod conversion;
mod observability;
