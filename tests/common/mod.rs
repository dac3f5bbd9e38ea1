pub mod sitemap_server;
