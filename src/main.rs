use std::rc::Rc;

use clean_charge_dashboard::components::Dashboard;
use clean_charge_dashboard::components::dashboard::DashboardProps;
use clean_charge_dashboard::services::api::DashboardClient;
use clean_charge_dashboard::services::theme::load_palette;

fn main() {
    let client = match DashboardClient::new() {
        Ok(client) => Rc::new(client),
        Err(e) => {
            gloo::console::error!(format!("Cannot start dashboard: {e}"));
            return;
        }
    };

    gloo::console::log!(format!("Using backend at {}", client.config().base_url()));

    let props = DashboardProps {
        client,
        palette: Rc::new(load_palette()),
    };

    yew::Renderer::<Dashboard>::with_props(props).render();
}
