// Screens exposed to the router
use crate::models::Screen;

static SCREENS: [Screen; 2] = [
    Screen {
        name: "Line Chart 📈",
        navigation_id: "Line Chart",
    },
    Screen {
        name: "Bar Chart 📊",
        navigation_id: "Bar Chart",
    },
];

pub const LINE_CHART: &str = "Line Chart";
pub const BAR_CHART: &str = "Bar Chart";

pub fn screens() -> &'static [Screen] {
    &SCREENS
}

pub fn find_screen(navigation_id: &str) -> Option<&'static Screen> {
    SCREENS.iter().find(|s| s.navigation_id == navigation_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two_screens_in_stable_order() {
        let ids: Vec<_> = screens().iter().map(|s| s.navigation_id).collect();
        assert_eq!(ids, vec![LINE_CHART, BAR_CHART]);
        assert_eq!(screens()[0].name, "Line Chart 📈");
        assert_eq!(screens()[1].name, "Bar Chart 📊");
    }

    #[test]
    fn find_screen_by_navigation_id() {
        assert_eq!(find_screen("Bar Chart").map(|s| s.name), Some("Bar Chart 📊"));
        assert!(find_screen("Pie Chart").is_none());
    }
}
