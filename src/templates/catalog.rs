//! The fixed template catalog.
use super::{Category, Parameter, Template};

const COUNTRY: Parameter = Parameter::new("country", "Country code (2 letters)", "ID");

pub const TEMPLATES: &[Template] = &[
    // Network & infrastructure
    Template {
        id: "net_provider",
        name: "Find Provider / ISP",
        description: "Every device owned by a given ISP or provider in a country",
        emoji: "📶",
        category: Category::Network,
        params: &[
            Parameter::new("org", "ISP / provider name", "Telkom Indonesia"),
            COUNTRY,
        ],
        query: r#"org:"{org}" country:"{country}""#,
        example: r#"org:"Telkom Indonesia" country:"ID""#,
        facets: "",
        tags: &["isp", "provider", "telkom"],
    },
    Template {
        id: "net_port_country",
        name: "Open Port in Country",
        description: "Devices with a given port open in a country",
        emoji: "🔌",
        category: Category::Network,
        params: &[Parameter::new("port", "Port number", "22"), COUNTRY],
        query: r#"port:{port} country:"{country}""#,
        example: r#"port:22 country:"ID""#,
        facets: "",
        tags: &["port", "ssh", "open"],
    },
    Template {
        id: "net_service_city",
        name: "Service in City",
        description: "A given service running in a specific city",
        emoji: "🏙️",
        category: Category::Network,
        params: &[
            Parameter::new("product", "Service / product name", "nginx"),
            Parameter::new("city", "City name", "Jakarta"),
            COUNTRY,
        ],
        query: r#"product:"{product}" city:"{city}" country:"{country}""#,
        example: r#"product:"nginx" city:"Jakarta" country:"ID""#,
        facets: "",
        tags: &["service", "city"],
    },
    Template {
        id: "net_asn",
        name: "Search by ASN",
        description: "Devices announced by an Autonomous System Number",
        emoji: "🔢",
        category: Category::Network,
        params: &[Parameter::new("asn", "ASN (e.g. AS17974)", "AS17974")],
        query: "asn:{asn}",
        example: "asn:AS17974",
        facets: "",
        tags: &["asn", "bgp"],
    },
    Template {
        id: "net_subnet",
        name: "Subnet / CIDR",
        description: "Devices inside a given subnet",
        emoji: "🔀",
        category: Category::Network,
        params: &[Parameter::new("cidr", "Subnet in CIDR notation", "202.134.0.0/16")],
        query: "net:{cidr}",
        example: "net:202.134.0.0/16",
        facets: "",
        tags: &["subnet", "cidr", "network"],
    },
    Template {
        id: "net_hostname",
        name: "Search Hostname",
        description: "Devices by hostname or domain suffix",
        emoji: "🏷️",
        category: Category::Network,
        params: &[Parameter::new("hostname", "Hostname or domain", ".go.id")],
        query: r#"hostname:"{hostname}""#,
        example: r#"hostname:".go.id""#,
        facets: "",
        tags: &["hostname", "domain", "dns"],
    },
    Template {
        id: "net_os_country",
        name: "Operating System in Country",
        description: "Devices running a given OS in a country",
        emoji: "💻",
        category: Category::Network,
        params: &[
            Parameter::new("os", "Operating system name", "Windows 10"),
            COUNTRY,
        ],
        query: r#"os:"{os}" country:"{country}""#,
        example: r#"os:"Windows 10" country:"ID""#,
        facets: "",
        tags: &["os", "windows", "linux"],
    },
    // Web servers & apps
    Template {
        id: "web_server",
        name: "Web Server in Country",
        description: "Web servers (Apache, Nginx, IIS) in a country",
        emoji: "🌍",
        category: Category::Web,
        params: &[Parameter::new("server", "Web server name", "Apache"), COUNTRY],
        query: r#"http.server:"{server}" country:"{country}""#,
        example: r#"http.server:"Apache" country:"ID""#,
        facets: "",
        tags: &["web", "apache", "nginx", "iis"],
    },
    Template {
        id: "web_title",
        name: "Web Page Title",
        description: "Websites by HTML page title",
        emoji: "📄",
        category: Category::Web,
        params: &[Parameter::new("title", "Page title", "Dashboard")],
        query: r#"http.title:"{title}""#,
        example: r#"http.title:"Dashboard""#,
        facets: "",
        tags: &["title", "web", "html"],
    },
    Template {
        id: "web_component",
        name: "Web Component",
        description: "Websites built with a given technology",
        emoji: "⚙️",
        category: Category::Web,
        params: &[
            Parameter::new("component", "Technology (WordPress, jQuery, ...)", "WordPress"),
            COUNTRY,
        ],
        query: r#"http.component:"{component}" country:"{country}""#,
        example: r#"http.component:"WordPress" country:"ID""#,
        facets: "",
        tags: &["wordpress", "component", "technology"],
    },
    Template {
        id: "web_favicon",
        name: "Favicon Hash",
        description: "Websites by favicon hash, useful to fingerprint an application",
        emoji: "🖼️",
        category: Category::Web,
        params: &[Parameter::new("hash", "Favicon hash", "116323821")],
        query: "http.favicon.hash:{hash}",
        example: "http.favicon.hash:116323821",
        facets: "",
        tags: &["favicon", "hash", "fingerprint"],
    },
    Template {
        id: "web_ssl_org",
        name: "SSL Certificate by Org",
        description: "Hosts whose SSL certificate names a given organisation",
        emoji: "🔒",
        category: Category::Web,
        params: &[Parameter::new("org", "Organisation in the certificate", "Government of Indonesia")],
        query: r#"ssl.cert.subject.O:"{org}""#,
        example: r#"ssl.cert.subject.O:"Government of Indonesia""#,
        facets: "",
        tags: &["ssl", "certificate", "tls"],
    },
    Template {
        id: "web_ssl_expired",
        name: "Expired SSL in Country",
        description: "Websites serving an expired SSL certificate",
        emoji: "🔓",
        category: Category::Web,
        params: &[COUNTRY],
        query: r#"ssl.cert.expired:true country:"{country}""#,
        example: r#"ssl.cert.expired:true country:"ID""#,
        facets: "",
        tags: &["ssl", "expired", "security"],
    },
    Template {
        id: "web_http_status",
        name: "HTTP Status Code",
        description: "Web servers answering with a given HTTP status",
        emoji: "📊",
        category: Category::Web,
        params: &[Parameter::new("status", "HTTP status code", "200"), COUNTRY],
        query: r#"http.status:{status} country:"{country}""#,
        example: r#"http.status:200 country:"ID""#,
        facets: "",
        tags: &["http", "status"],
    },
    // IoT & cameras
    Template {
        id: "iot_webcam",
        name: "Webcam / IP Camera",
        description: "Exposed IP cameras and webcams",
        emoji: "📷",
        category: Category::Iot,
        params: &[
            Parameter::new("brand", "Camera brand (Hikvision, Dahua, ...)", "Hikvision"),
            COUNTRY,
        ],
        query: r#"product:"{brand}" country:"{country}""#,
        example: r#"product:"Hikvision" country:"ID""#,
        facets: "",
        tags: &["camera", "webcam", "cctv", "hikvision"],
    },
    Template {
        id: "iot_router",
        name: "Router Admin Panel",
        description: "Exposed router administration panels",
        emoji: "📡",
        category: Category::Iot,
        params: &[
            Parameter::new("router_type", "Router type (MikroTik, TP-Link)", "MikroTik"),
            COUNTRY,
        ],
        query: r#"http.title:"{router_type}" country:"{country}""#,
        example: r#"http.title:"MikroTik" country:"ID""#,
        facets: "",
        tags: &["router", "mikrotik", "admin"],
    },
    Template {
        id: "iot_printer",
        name: "Exposed Printers",
        description: "Network printers reachable from the internet",
        emoji: "🖨️",
        category: Category::Iot,
        params: &[COUNTRY],
        query: r#"port:9100 country:"{country}""#,
        example: r#"port:9100 country:"ID""#,
        facets: "",
        tags: &["printer", "iot"],
    },
    Template {
        id: "iot_mqtt",
        name: "MQTT Broker",
        description: "Exposed MQTT brokers (IoT messaging)",
        emoji: "📨",
        category: Category::Iot,
        params: &[COUNTRY],
        query: r#"product:"MQTT" country:"{country}""#,
        example: r#"product:"MQTT" country:"ID""#,
        facets: "",
        tags: &["mqtt", "iot", "broker"],
    },
    // ICS / SCADA
    Template {
        id: "ics_scada",
        name: "SCADA / ICS Devices",
        description: "Industrial control devices by tag",
        emoji: "🏭",
        category: Category::Industrial,
        params: &[Parameter::new("tag", "ICS tag (ics, scada)", "ics"), COUNTRY],
        query: r#"tag:"{tag}" country:"{country}""#,
        example: r#"tag:"ics" country:"ID""#,
        facets: "",
        tags: &["scada", "ics", "industrial"],
    },
    Template {
        id: "ics_modbus",
        name: "Modbus Devices",
        description: "Devices speaking the Modbus ICS protocol",
        emoji: "⚡",
        category: Category::Industrial,
        params: &[COUNTRY],
        query: r#"port:502 country:"{country}""#,
        example: r#"port:502 country:"ID""#,
        facets: "",
        tags: &["modbus", "ics"],
    },
    Template {
        id: "ics_plc",
        name: "PLC Devices",
        description: "Programmable logic controllers",
        emoji: "🔧",
        category: Category::Industrial,
        params: &[
            Parameter::new("plc_brand", "PLC brand (Siemens, Allen-Bradley)", "Siemens"),
            COUNTRY,
        ],
        query: r#"product:"{plc_brand}" country:"{country}""#,
        example: r#"product:"Siemens" country:"ID""#,
        facets: "",
        tags: &["plc", "siemens"],
    },
    // Databases
    Template {
        id: "db_mongodb",
        name: "Exposed MongoDB",
        description: "MongoDB databases reachable from the internet",
        emoji: "🍃",
        category: Category::Database,
        params: &[COUNTRY],
        query: r#"product:"MongoDB" country:"{country}""#,
        example: r#"product:"MongoDB" country:"ID""#,
        facets: "",
        tags: &["mongodb", "nosql", "database"],
    },
    Template {
        id: "db_elastic",
        name: "Exposed Elasticsearch",
        description: "Elasticsearch clusters reachable from the internet",
        emoji: "🔎",
        category: Category::Database,
        params: &[COUNTRY],
        query: r#"product:"Elastic" country:"{country}""#,
        example: r#"product:"Elastic" country:"ID""#,
        facets: "",
        tags: &["elasticsearch", "elastic", "database"],
    },
    Template {
        id: "db_redis",
        name: "Exposed Redis",
        description: "Redis servers reachable from the internet",
        emoji: "🔴",
        category: Category::Database,
        params: &[COUNTRY],
        query: r#"product:"Redis" country:"{country}""#,
        example: r#"product:"Redis" country:"ID""#,
        facets: "",
        tags: &["redis", "database", "cache"],
    },
    Template {
        id: "db_mysql",
        name: "Exposed MySQL",
        description: "MySQL servers reachable from the internet",
        emoji: "🐬",
        category: Category::Database,
        params: &[COUNTRY],
        query: r#"product:"MySQL" country:"{country}""#,
        example: r#"product:"MySQL" country:"ID""#,
        facets: "",
        tags: &["mysql", "database", "sql"],
    },
    Template {
        id: "db_postgres",
        name: "Exposed PostgreSQL",
        description: "PostgreSQL servers reachable from the internet",
        emoji: "🐘",
        category: Category::Database,
        params: &[COUNTRY],
        query: r#"product:"PostgreSQL" country:"{country}""#,
        example: r#"product:"PostgreSQL" country:"ID""#,
        facets: "",
        tags: &["postgres", "postgresql", "database"],
    },
    // Vulnerabilities
    Template {
        id: "vuln_cve",
        name: "Specific CVE",
        description: "Devices vulnerable to a given CVE",
        emoji: "🛡️",
        category: Category::Vuln,
        params: &[Parameter::new("cve", "CVE id", "CVE-2021-44228")],
        query: r#"vuln:"{cve}""#,
        example: r#"vuln:"CVE-2021-44228""#,
        facets: "",
        tags: &["cve", "vulnerability"],
    },
    Template {
        id: "vuln_cve_country",
        name: "CVE in Country",
        description: "Devices vulnerable to a given CVE in one country",
        emoji: "🚨",
        category: Category::Vuln,
        params: &[Parameter::new("cve", "CVE id", "CVE-2021-44228"), COUNTRY],
        query: r#"vuln:"{cve}" country:"{country}""#,
        example: r#"vuln:"CVE-2021-44228" country:"ID""#,
        facets: "",
        tags: &["cve", "vulnerability", "country"],
    },
    Template {
        id: "vuln_has_vuln",
        name: "Any Known Vulnerability",
        description: "Every device with at least one known vulnerability in a country",
        emoji: "💥",
        category: Category::Vuln,
        params: &[COUNTRY],
        query: r#"has_vuln:true country:"{country}""#,
        example: r#"has_vuln:true country:"ID""#,
        facets: "",
        tags: &["vulnerability", "vuln"],
    },
    Template {
        id: "vuln_default_pass",
        name: "Default Password",
        description: "Devices advertising a default password in their banner",
        emoji: "🔑",
        category: Category::Vuln,
        params: &[COUNTRY],
        query: r#""default password" country:"{country}""#,
        example: r#""default password" country:"ID""#,
        facets: "",
        tags: &["password", "default", "credential"],
    },
    // Cloud
    Template {
        id: "cloud_aws",
        name: "AWS Services",
        description: "Services running on Amazon Web Services",
        emoji: "☁️",
        category: Category::Cloud,
        params: &[Parameter::new("product", "Product / service name", "nginx")],
        query: r#"org:"Amazon" product:"{product}""#,
        example: r#"org:"Amazon" product:"nginx""#,
        facets: "",
        tags: &["aws", "amazon", "cloud"],
    },
    Template {
        id: "cloud_gcp",
        name: "Google Cloud Services",
        description: "Services running on Google Cloud",
        emoji: "🌈",
        category: Category::Cloud,
        params: &[Parameter::new("product", "Product / service name", "nginx")],
        query: r#"org:"Google Cloud" product:"{product}""#,
        example: r#"org:"Google Cloud" product:"nginx""#,
        facets: "",
        tags: &["gcp", "google", "cloud"],
    },
    Template {
        id: "cloud_azure",
        name: "Azure Services",
        description: "Services running on Microsoft Azure",
        emoji: "🔷",
        category: Category::Cloud,
        params: &[Parameter::new("product", "Product / service name", "nginx")],
        query: r#"org:"Microsoft Azure" product:"{product}""#,
        example: r#"org:"Microsoft Azure" product:"nginx""#,
        facets: "",
        tags: &["azure", "microsoft", "cloud"],
    },
    Template {
        id: "cloud_digitalocean",
        name: "DigitalOcean Droplets",
        description: "Services hosted on DigitalOcean",
        emoji: "🌊",
        category: Category::Cloud,
        params: &[COUNTRY],
        query: r#"org:"DigitalOcean" country:"{country}""#,
        example: r#"org:"DigitalOcean" country:"ID""#,
        facets: "",
        tags: &["digitalocean", "cloud"],
    },
    // By country / region
    Template {
        id: "region_overview",
        name: "Country Overview",
        description: "Summary of every exposed service in a country",
        emoji: "🗺️",
        category: Category::Country,
        params: &[COUNTRY],
        query: r#"country:"{country}""#,
        example: r#"country:"ID""#,
        facets: "org:10,port:10,product:10,os:5",
        tags: &["country", "overview", "stats"],
    },
    Template {
        id: "region_city",
        name: "City Overview",
        description: "Summary of exposed devices in a city",
        emoji: "🏙️",
        category: Category::Country,
        params: &[Parameter::new("city", "City name", "Jakarta"), COUNTRY],
        query: r#"city:"{city}" country:"{country}""#,
        example: r#"city:"Jakarta" country:"ID""#,
        facets: "org:10,port:10,product:10",
        tags: &["city", "overview"],
    },
];
