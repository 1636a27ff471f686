use crate::models::ScoreSnapshot;

pub fn render_index(snapshot: &ScoreSnapshot) -> String {
    INDEX_HTML
        .replace("{{SCORE}}", &snapshot.global_score.to_string())
        .replace("{{UPDATED}}", &snapshot.last_updated.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Click Counter</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 24px;
    }

    main {
      width: min(560px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: 0 20px 50px rgba(47, 72, 88, 0.18);
      padding: 32px;
      display: grid;
      gap: 20px;
      text-align: center;
    }

    h1 {
      margin: 0;
      font-family: Georgia, serif;
    }

    .score {
      font-size: 4rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .meta {
      color: #6b645d;
      font-size: 0.9rem;
    }

    .status.offline {
      color: var(--accent);
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 14px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    #click {
      background: var(--accent);
    }

    #stats-btn {
      background: var(--accent-2);
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    td {
      padding: 6px 4px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    td:last-child {
      text-align: right;
      font-weight: 600;
    }
  </style>
</head>
<body>
  <main>
    <h1>Click Counter</h1>
    <div class="score" id="score">{{SCORE}}</div>
    <div class="meta">Last updated <span id="updated" data-ms="{{UPDATED}}"></span></div>
    <div class="meta status" id="status">connecting…</div>
    <div>
      <button id="click" type="button">Click</button>
      <button id="stats-btn" type="button">Daily stats</button>
    </div>
    <table id="stats"></table>
  </main>
  <script>
    const scoreEl = document.getElementById('score');
    const updatedEl = document.getElementById('updated');
    const statusEl = document.getElementById('status');
    const statsEl = document.getElementById('stats');
    let socket;

    function showUpdated(ms) {
      updatedEl.textContent = new Date(Number(ms)).toLocaleString();
    }

    function showScore(data) {
      scoreEl.textContent = data.globalScore;
      showUpdated(data.lastUpdated);
    }

    function showStats(stats) {
      statsEl.innerHTML = '';
      const days = Object.keys(stats).sort().reverse();
      if (days.length === 0) {
        statsEl.innerHTML = '<tr><td>No clicks yet</td><td></td></tr>';
        return;
      }
      for (const day of days) {
        const row = document.createElement('tr');
        row.innerHTML = `<td>${day}</td><td>${stats[day]}</td>`;
        statsEl.appendChild(row);
      }
    }

    function send(event) {
      if (socket && socket.readyState === WebSocket.OPEN) {
        socket.send(JSON.stringify({ event }));
      }
    }

    function connect() {
      const scheme = location.protocol === 'https:' ? 'wss' : 'ws';
      socket = new WebSocket(`${scheme}://${location.host}/ws`);
      socket.onopen = () => {
        statusEl.textContent = 'live';
        statusEl.classList.remove('offline');
      };
      socket.onmessage = (message) => {
        let payload;
        try {
          payload = JSON.parse(message.data);
        } catch (err) {
          return;
        }
        switch (payload.event) {
          case 'initialData':
          case 'scoreUpdate':
            showScore(payload.data);
            break;
          case 'dailyStatsResponse':
            showStats(payload.data);
            break;
        }
      };
      socket.onclose = () => {
        statusEl.textContent = 'offline, retrying…';
        statusEl.classList.add('offline');
        setTimeout(connect, 2000);
      };
    }

    document.getElementById('click').addEventListener('click', () => send('click'));
    document.getElementById('stats-btn').addEventListener('click', () => send('requestDailyStats'));
    showUpdated(updatedEl.dataset.ms);
    connect();
  </script>
</body>
</html>
"#;
