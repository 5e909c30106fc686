mod controller;
mod scenario;
mod util;
