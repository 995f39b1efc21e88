//! Reusable file contents for tests.

#![allow(dead_code)]

pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
  <head><link rel="stylesheet" href="css/site.css"></head>
  <body><h1>Hello from now</h1></body>
</html>
"#;

pub const SITE_CSS: &str = "body { font-family: sans-serif; }\n";

pub const PACKAGE_JSON: &str = r#"{
  "name": "express-app",
  "dependencies": { "express": "^4.16.0" },
  "scripts": { "start": "node server.js" }
}
"#;

pub const SERVER_JS: &str = "require('express')().listen(3000);\n";

pub const DOCKERFILE: &str = "FROM nginx:alpine\nCOPY . /usr/share/nginx/html\n";
