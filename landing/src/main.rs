// Robert A. Sanchez portfolio landing page, Leptos 0.8 edition

fn main() {
    advocate_landing::start();
}
