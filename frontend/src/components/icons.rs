//! 内联 SVG 图标组件
//!
//! 线条风格，继承 currentColor，尺寸由 class 控制。

use leptos::prelude::*;

macro_rules! icon {
    ($name:ident, $($d:expr),+ $(,)?) => {
        #[component]
        pub fn $name(#[prop(optional, default = "h-5 w-5")] class: &'static str) -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=class
                >
                    $(<path d=$d />)+
                </svg>
            }
        }
    };
}

icon!(
    Sun,
    "M12 3v2M12 19v2M5.6 5.6l1.4 1.4M17 17l1.4 1.4M3 12h2M19 12h2M5.6 18.4L7 17M17 7l1.4-1.4",
    "M12 8a4 4 0 1 0 0 8a4 4 0 0 0 0-8z",
);

icon!(Moon, "M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z");

icon!(
    LayoutDashboard,
    "M3 3h8v10H3zM13 3h8v6h-8zM13 13h8v8h-8zM3 17h8v4H3z",
);

icon!(
    Factory,
    "M2 20h20M4 20V9l5 4V9l5 4V9l6 5v6",
    "M8 17h.01M12 17h.01M16 17h.01",
);

icon!(
    PanelTop,
    "M3 5h18v14H3zM3 10h18M9 10v9M15 10v9",
);

icon!(
    BellRing,
    "M6 9a6 6 0 1 1 12 0c0 5 2 6 2 6H4s2-1 2-6",
    "M10 19a2 2 0 0 0 4 0",
);

icon!(
    Clock,
    "M12 3a9 9 0 1 0 0 18a9 9 0 0 0 0-18z",
    "M12 7v5l3 3",
);

icon!(
    PieChart,
    "M21 12A9 9 0 1 1 12 3v9z",
    "M21 8.5A9 9 0 0 0 15.5 3V8.5z",
);

icon!(
    FlaskConical,
    "M9 3h6M10 3v6l-6 10a1.5 1.5 0 0 0 1.3 2.2h13.4A1.5 1.5 0 0 0 20 19L14 9V3",
    "M7.5 15h9",
);

icon!(
    Settings,
    "M12 9a3 3 0 1 0 0 6a3 3 0 0 0 0-6z",
    "M19.4 15a1.7 1.7 0 0 0 .3 1.9l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.9-.3a1.7 1.7 0 0 0-1 1.5V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-1-1.6a1.7 1.7 0 0 0-1.9.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.9a1.7 1.7 0 0 0-1.5-1H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.6-1a1.7 1.7 0 0 0-.3-1.9l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.9.3h0a1.7 1.7 0 0 0 1-1.5V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 1 1.5h0a1.7 1.7 0 0 0 1.9-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.9v0a1.7 1.7 0 0 0 1.5 1H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z",
);

icon!(
    LogOut,
    "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
    "M16 17l5-5-5-5M21 12H9",
);

icon!(
    RefreshCw,
    "M21 12a9 9 0 1 1-2.6-6.4M21 3v6h-6",
);

icon!(
    ShieldCheck,
    "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
    "M9 12l2 2 4-4",
);

