use crate::model::{Callout, ColumnWidths, Document};
use crate::style::{rgb, LabelPalette, PageGeometry, Palette, Spacing, StyleConfig, Typography};

use super::{bullet_text, commands, heading};

pub(super) fn style() -> StyleConfig {
    StyleConfig::default()
        .with_geometry(PageGeometry::a4().with_margins(20.0, 12.0, 15.0, 12.0))
        .with_palette(Palette {
            title: rgb(0x1F2937),
            subtitle: rgb(0x374151),
            section: rgb(0x059669),
            header_fill: rgb(0x059669),
            description: rgb(0x374151),
            grid: rgb(0xE5E7EB),
            row_shades: [rgb(0xFFFFFF), rgb(0xF3F4F6)],
            callout_fill: rgb(0xF0F9FF),
            callout_border: rgb(0x7C3AED),
            callout_text: rgb(0x1E40AF),
            ..Palette::default()
        })
        .with_labels(LabelPalette {
            default: rgb(0xD35400),
            ..LabelPalette::default()
        })
        .with_typography(Typography {
            title_size: 28,
            section_size: 16,
            body_size: 10,
            callout_size: 10,
            ..Typography::default()
        })
        .with_spacing(Spacing {
            after_title_mm: 8.0,
            cell_padding_vertical_mm: 1.8,
            cell_padding_horizontal_mm: 3.0,
            callout_padding_mm: 4.5,
            grid_thickness_mm: 0.35,
            callout_border_mm: 0.7,
            ..Spacing::default()
        })
}

pub(super) fn document() -> Document {
    Document::new("Docker Commands Cheat Sheet")
        .with_subtitle("Complete Reference Guide for Docker Commands".to_owned())
        .with_section(commands(
            "Container Management",
            &[
                ("docker run -d nginx", "Run container in detached mode"),
                ("docker run -it ubuntu bash", "Interactive container with terminal"),
                ("docker run -p 8080:80 nginx", "Map port 8080 to container port 80"),
                ("docker run --name myapp nginx", "Run with custom container name"),
                ("docker run -v /host:/container app", "Mount volume from host to container"),
                ("docker ps", "List running containers"),
                ("docker ps -a", "List all containers (including stopped)"),
                ("docker start CONTAINER", "Start a stopped container"),
                ("docker stop CONTAINER", "Stop a running container"),
                ("docker restart CONTAINER", "Restart a container"),
                ("docker kill CONTAINER", "Force stop a container"),
                ("docker rm CONTAINER", "Remove a container"),
                ("docker rm -f CONTAINER", "Force remove a running container"),
            ],
        ))
        .with_section(commands(
            "Container Information & Logs",
            &[
                ("docker logs CONTAINER", "View container logs"),
                ("docker logs -f CONTAINER", "Follow logs in real-time"),
                ("docker logs --tail 100 CONTAINER", "Show last 100 log lines"),
                ("docker inspect CONTAINER", "Detailed container information"),
                ("docker stats", "Live resource usage statistics"),
                ("docker top CONTAINER", "Running processes in container"),
                ("docker exec CONTAINER COMMAND", "Execute command in container"),
                ("docker exec -it CONTAINER bash", "Interactive bash session"),
            ],
        ))
        .with_section(commands(
            "Image Management",
            &[
                ("docker images", "List local images"),
                ("docker images -a", "List all images (including intermediate)"),
                ("docker pull IMAGE[:TAG]", "Download image from registry"),
                ("docker push IMAGE[:TAG]", "Upload image to registry"),
                ("docker build .", "Build image from current directory"),
                ("docker build -t myapp:v1.0 .", "Build image with tag"),
                ("docker build --no-cache .", "Build without using cache"),
                ("docker rmi IMAGE", "Remove an image"),
                ("docker rmi -f IMAGE", "Force remove an image"),
                ("docker tag SOURCE TARGET", "Tag an image"),
                ("docker history IMAGE", "Show image layer history"),
                ("docker image prune", "Remove unused images"),
                ("docker image prune -a", "Remove all unused images"),
            ],
        ))
        .with_page_break()
        .with_section(commands(
            "Network & Volume Management",
            &[
                ("docker network ls", "List networks"),
                ("docker network create NETWORK", "Create custom network"),
                ("docker network rm NETWORK", "Remove network"),
                ("docker network inspect NETWORK", "Network detailed information"),
                ("docker volume ls", "List volumes"),
                ("docker volume create VOLUME", "Create named volume"),
                ("docker volume rm VOLUME", "Remove volume"),
                ("docker volume inspect VOLUME", "Volume detailed information"),
                ("docker volume prune", "Remove unused volumes"),
            ],
        ))
        .with_section(commands(
            "Docker Compose",
            &[
                ("docker-compose up", "Start all services"),
                ("docker-compose up -d", "Start services in detached mode"),
                ("docker-compose up --build", "Rebuild images and start services"),
                ("docker-compose down", "Stop and remove containers/networks"),
                ("docker-compose down -v", "Stop and remove volumes too"),
                ("docker-compose ps", "List running services"),
                ("docker-compose logs", "View logs from all services"),
                ("docker-compose logs SERVICE", "View logs from specific service"),
                ("docker-compose exec SERVICE bash", "Execute bash in service container"),
                ("docker-compose restart SERVICE", "Restart specific service"),
                ("docker-compose scale SERVICE=3", "Scale service to 3 instances"),
            ],
        ))
        .with_section(commands(
            "System Management & Cleanup",
            &[
                ("docker version", "Show Docker version information"),
                ("docker info", "Display system-wide information"),
                ("docker system df", "Show Docker disk usage"),
                ("docker system prune", "Remove unused data"),
                ("docker system prune -a", "Remove all unused data"),
                ("docker system prune -a --volumes", "Remove everything unused"),
                ("docker container prune", "Remove stopped containers"),
                ("docker login", "Login to Docker registry"),
                ("docker logout", "Logout from Docker registry"),
                ("docker search TERM", "Search Docker Hub for images"),
            ],
        ))
        .with_section(
            commands(
                "Common Docker Run Options",
                &[
                    ("-d, --detach", "Run container in background"),
                    ("-it", "Interactive mode with TTY"),
                    ("-p, --publish HOST:CONTAINER", "Publish container port to host"),
                    ("-v, --volume HOST:CONTAINER", "Bind mount a volume"),
                    ("--name NAME", "Assign name to container"),
                    ("-e, --env KEY=VALUE", "Set environment variables"),
                    ("--rm", "Remove container when it exits"),
                    ("-m, --memory LIMIT", "Memory limit (e.g., 512m, 2g)"),
                    ("--cpus NUMBER", "CPU limit (e.g., 0.5, 2.0)"),
                    ("--restart POLICY", "Restart policy (no/always/unless-stopped)"),
                    ("--network NETWORK", "Connect to specific network"),
                    ("-w, --workdir PATH", "Set working directory"),
                ],
            )
            .with_widths(ColumnWidths::ratios([6.0, 9.0])),
        )
        .with_section(
            commands(
                "Common Dockerfile Instructions",
                &[
                    ("FROM image:tag", "Specify base image"),
                    ("WORKDIR /path", "Set working directory"),
                    ("COPY src dest", "Copy files from host to image"),
                    ("ADD src dest", "Copy files (supports URLs & archives)"),
                    ("RUN command", "Execute command during build"),
                    ("ENV KEY=VALUE", "Set environment variable"),
                    ("EXPOSE port", "Document port usage"),
                    ("USER user:group", "Set user for subsequent commands"),
                    ("CMD [\"cmd\", \"arg1\"]", "Default command to run"),
                    ("ENTRYPOINT [\"cmd\"]", "Configure container executable"),
                    ("VOLUME [\"/data\"]", "Create mount point"),
                    ("LABEL key=value", "Add metadata to image"),
                ],
            )
            .with_widths(ColumnWidths::ratios([6.0, 9.0])),
        )
        .with_callout(tips())
}

fn tips() -> Callout {
    [
        "Use specific image tags instead of 'latest' in production",
        "Use .dockerignore to exclude unnecessary files from build context",
        "Multi-stage builds help reduce final image size",
        "Use 'docker run --rm' for temporary containers",
        "Regularly clean up with 'docker system prune'",
        "Name your containers and volumes for easier management",
        "Use volumes for persistent data, not container filesystem",
        "Always check container logs when troubleshooting",
        "Use healthchecks in production deployments",
        "Keep containers stateless and configuration external",
    ]
    .into_iter()
    .fold(
        Callout::new([heading("Pro Tips & Best Practices:"), String::new()]),
        |callout, tip| callout.with_line(bullet_text(tip)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_uses_the_wider_docker_margins() {
        let style = style();
        assert!((style.content_width_mm() - 186.0).abs() < 1e-9);
        assert_eq!(style.labels.color_for(None), rgb(0xD35400));
    }

    #[test]
    fn bracketed_placeholders_survive_planning() {
        let plan = crate::layout::plan(&document(), &style()).expect("docker plans");
        let label = plan
            .sections()
            .nth(2)
            .and_then(|section| section.rows().get(2))
            .map(|row| row.cells()[0].plain())
            .expect("image management row");
        assert_eq!(label, "docker pull IMAGE[:TAG]");
    }
}
