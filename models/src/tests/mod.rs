mod date_criteria;
mod search_request;
