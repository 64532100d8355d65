use store::{Category, User};

/// Destinations of the storefront, independent of any platform router.
///
/// Shared views report navigation through `EventHandler<Page>`; each platform
/// shell maps a `Page` onto its own route type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Products(Category),
    Profile,
    Deposit,
    Admin,
    AdminProducts,
    Contact,
}

impl Page {
    /// Where a freshly signed-in user lands: admins on the dashboard, everyone else on home.
    pub fn landing_for(user: &User) -> Page {
        if user.is_admin() {
            Page::Admin
        } else {
            Page::Home
        }
    }
}
