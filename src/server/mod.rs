pub mod router;
mod routes;
